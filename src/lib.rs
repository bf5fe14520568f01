pub mod classify;
pub mod decode;
pub mod emit;
pub mod encode;
pub mod opcode;
pub mod regmap;
pub mod translate;

pub use encode::Word;
pub use opcode::Opcode;
pub use regmap::RegWindow;
pub use translate::{translate, translate_to_string, AsmError};
