//! Hash-password command - prints an Argon2 PHC string for seed files

use clap::Args;

use crate::infrastructure::user::Argon2Hasher;

#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash (8-128 characters)
    pub password: String,
}

pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = Argon2Hasher::new().hash_new_password(&args.password)?;
    println!("{}", hash);
    Ok(())
}
