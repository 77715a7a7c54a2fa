use crate::{entities::Backup, errors::Result};

/// Access to one practice backup archive, typed.
pub trait BackupRepository {
    fn load<P>(&self, archive: P) -> Result<Backup>
    where
        P: AsRef<std::path::Path>;
}
