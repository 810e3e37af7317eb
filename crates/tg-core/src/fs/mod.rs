mod node;
mod tree;
mod workdir;

pub use node::{Directory, Node};
pub use tree::{README_TEXT, STATUS_PATH, VirtualFilesystem};
pub use workdir::{ROOT_SEGMENT, WorkingDirectory};
