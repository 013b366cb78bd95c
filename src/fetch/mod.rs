/// Fetch layer: locating, running and decoding the external profile routine.
pub mod decode;
pub mod errors;
pub mod interpreter;
pub mod process;
pub mod script;

pub use decode::decode_profile;
pub use errors::FetchError;
pub use interpreter::resolve_interpreter;
pub use process::Invocation;
pub use script::{resolve_root, script_path};
