quantity!(
    /// Electric current, per phase unless stated otherwise.
    Amperes, "A"
);
