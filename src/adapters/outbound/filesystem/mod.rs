/// Filesystem adapters: graph exports, POM inspection and report output
mod file_writer;
mod graph_file_reader;
mod pom_module_oracle;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use graph_file_reader::GraphFileReader;
pub use pom_module_oracle::PomModuleOracle;
