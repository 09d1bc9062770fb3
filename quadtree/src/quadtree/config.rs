#[derive(Debug, Clone)]
pub struct Config {
    /// A leaf splits once it holds this many elements.
    pub max_elements: u32,
    /// Leaves at this depth never split.
    pub max_depth: u32,
    /// Records reserved up front in each arena.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_elements: 8,
            max_depth: 8,
            initial_capacity: 128,
        }
    }
}
