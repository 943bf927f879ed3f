pub mod snapshot_writer;

pub use snapshot_writer::SnapshotWriter;
