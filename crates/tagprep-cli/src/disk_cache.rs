use tagprep::disk_cache::{TagprepDiskCache, TagprepDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory; downloaded archives are kept here.
    #[arg(long, default_value = None)]
    cache_dir: Option<String>,

    /// Data directory; embedding tables are unpacked here.
    #[arg(long, default_value = None)]
    data_dir: Option<String>,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<TagprepDiskCache, Box<dyn std::error::Error>> {
        let options = TagprepDiskCacheOptions::default()
            .with_cache_dir(self.cache_dir.as_ref())
            .with_data_dir(self.data_dir.as_ref());

        Ok(TagprepDiskCache::new(options)?)
    }
}
