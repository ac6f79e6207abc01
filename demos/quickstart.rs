use tictoc::{standard_graph, NoPathError, Scale, Time};

fn main() -> Result<(), NoPathError<Scale>> {
    let graph = standard_graph();
    let now = Time::now(&graph)?;

    println!("local:  {now}");
    println!("utc:    {}", now.utc()?);
    println!("tai:    {}", now.tai()?);
    println!("tt:     {}", now.tt()?);
    println!("tcg:    {}", now.tcg()?);
    println!("mjdtai: {}", now.mjdtai()?);
    Ok(())
}
