/// A configuration option, together with the bounds of the option.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used in messages.
    pub name: &'static str,

    /// The minimum permitted value.
    pub min: T,

    /// The maximum permitted value.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether the value lies within the (inclusive) bounds of the option.
    ///
    /// A value which is incomparable with either bound, e.g. a NaN, is out of bounds.
    pub fn in_bounds(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }
}
