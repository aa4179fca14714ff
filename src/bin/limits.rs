//! Prints the process's OS resource limits (soft values).

use anyhow::Context;
use rlimit::Resource;

fn main() -> anyhow::Result<()> {
    let (stack, _) = Resource::STACK.get().context("querying stack size limit")?;
    println!("stack size: {}", stack);

    let (cpu, _) = Resource::CPU.get().context("querying CPU time limit")?;
    println!("process limit: {}", cpu);

    println!("RLIM_INFINITY: {}", rlimit::INFINITY);

    let (nofile, _) = Resource::NOFILE
        .get()
        .context("querying open file descriptor limit")?;
    println!("max file descriptors: {}", nofile);

    Ok(())
}
