use tagprep::pretrained::{GLOVE_6B, GLOVE_6B_DIMS, KNOWN_RESOURCES, glove_6b_file_name};

/// Args for the resource listing command.
#[derive(clap::Args, Debug)]
pub struct ResourcesArgs {}

impl ResourcesArgs {
    /// Run the resource listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for resource in KNOWN_RESOURCES {
            println!("\"{}\" - {}", resource.name, resource.description);
            println!("  {}", resource.url);
            if resource == &GLOVE_6B {
                for dim in GLOVE_6B_DIMS {
                    println!("  * {}", glove_6b_file_name(dim));
                }
            }
        }

        Ok(())
    }
}
