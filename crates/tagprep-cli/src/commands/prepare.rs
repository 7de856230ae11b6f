use crate::{data_args::DataArgs, disk_cache::DiskCacheArgs, logging::LogArgs};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[clap(flatten)]
    data: DataArgs,

    #[clap(flatten)]
    disk_cache: DiskCacheArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl PrepareArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut disk_cache = self.disk_cache.init_disk_cache()?;
        let input = self.data.load(&mut disk_cache)?;

        for split in input.splits().iter() {
            let tokens: usize = split.documents.iter().map(|d| d.len()).sum();
            println!("{}\t{} documents\t{} tokens", split.kind, split.len(), tokens);
        }
        Ok(())
    }
}
