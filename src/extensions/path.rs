use crate::prelude::*;

pub trait PathExt: AsRef<Path> {
    fn join_many<P: AsRef<Path>>(&self, segments: impl IntoIterator<Item = P>) -> PathBuf {
        let mut ret = self.as_ref().to_path_buf();
        ret.extend(segments);
        ret
    }
}

impl<T: AsRef<Path>> PathExt for T {}
