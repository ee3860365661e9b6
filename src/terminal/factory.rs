use crate::{GameError, Terminal};

pub struct TerminalFactory;

impl TerminalFactory {
    pub fn create<T: Terminal>(args: T::Args) -> Result<T, GameError> {
        T::new(args)
    }
}
