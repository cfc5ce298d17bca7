//! Request extractors that reject with problem details.

pub(crate) use self::path::Path;

mod path;
