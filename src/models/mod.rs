mod book;

pub use book::{BookRecord, VolumeInfo, VolumeItem, VolumesResponse};
