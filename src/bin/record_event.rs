//! CLI entry for recording one wallet action:
//! `record_event <wallet> <action> <strategy> <amount>`

use anyhow::Result;

use yieldbridge::hub::http::{HttpKnowledgeBase, HttpMemoryHub};
use yieldbridge::recorder::EventRecorder;
use yieldbridge::state::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("Usage: record_event <wallet> <action> <strategy> <amount>");
        std::process::exit(1);
    }
    let (wallet, action, strategy, amount) = (&args[0], &args[1], &args[2], &args[3]);

    let cfg = Config::from_env();
    let hub = Box::new(HttpMemoryHub::new(&cfg));
    let kb = Box::new(HttpKnowledgeBase::new(&cfg));
    let mut recorder = EventRecorder::new(&cfg, hub, kb)?;

    recorder.record(wallet, action, strategy, amount).await?;

    println!("Memory & knowledge saved successfully.");
    println!("Local memory updated for wallet {}.", wallet);
    Ok(())
}
