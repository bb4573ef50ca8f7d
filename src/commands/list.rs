use anyhow::Result;
use solid::Principle;

pub fn cmd_list() -> Result<()> {
    for principle in Principle::ALL {
        println!(
            "{}. {:<4} {}",
            principle.ordinal(),
            principle.key(),
            principle.title()
        );
    }
    Ok(())
}
