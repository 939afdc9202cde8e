//! # slackdown CLI
//!
//! Command-line interface for the slackdown library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use slackdown::cli::Args;
use slackdown::collect::collect_channels;
use slackdown::markdown::write_file;
use slackdown::slack::SlackClient;
use slackdown::SlackdownError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SlackdownError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let token = args.token.clone();
    let config = args.into_config()?;

    // Print header
    println!("📦 slackdown v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📡 Channels: {}", config.channels.len());
    println!("📅 Since:    {} day(s) ago", config.since);
    println!("💾 Output:   {}", config.output);
    if !config.users.is_empty() {
        println!("👤 Users:    {}", config.users.join(", "));
    }
    println!();

    // Step 1: Fetch
    println!("⏳ Fetching Slack history...");
    let fetch_start = Instant::now();
    let client = SlackClient::new(token)?;
    let channels = collect_channels(&client, &config)?;
    let fetch_time = fetch_start.elapsed();

    let message_count: usize = channels.iter().map(|c| c.messages.len()).sum();
    let reply_count: usize = channels
        .iter()
        .flat_map(|c| &c.messages)
        .map(|m| m.thread_replies().count())
        .sum();
    println!(
        "   {} channels, {} messages, {} thread replies ({:.2}s)",
        channels.len(),
        message_count,
        reply_count,
        fetch_time.as_secs_f64()
    );

    // Step 2: Convert and write
    println!("💾 Writing Markdown...");
    let write_start = Instant::now();
    write_file(&channels, &config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", config.output);

    // Summary
    println!();
    println!("📊 Summary:");
    for channel in &channels {
        println!("   #{}: {} messages", channel.name, channel.messages.len());
    }
    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
