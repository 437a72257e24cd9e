/// ## Runtime configuration
///
/// `recover` turns the fatal `TYPE MISMATCH` into an ordinary
/// diagnostic. `persist` keeps the stack and variables between calls
/// to `Runtime::execute`; without it every call starts empty.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub recover: bool,
    pub persist: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recover: false,
            persist: true,
        }
    }
}
