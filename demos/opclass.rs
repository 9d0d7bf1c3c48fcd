//! Operating class lookup example application

use log::{debug, info};

use structopt::StructOpt;

use opclass::prelude::*;


#[derive(Debug, StructOpt)]
struct Options {

    #[structopt(long, required_unless = "list")]
    /// Primary 20 MHz channel number
    pub channel: Option<u8>,

    #[structopt(long, default_value = "20")]
    /// Channel bandwidth (20, 40, 80, 80+80, 160)
    pub bandwidth: ChannelBandwidth,

    #[structopt(long)]
    /// List every valid channel / bandwidth combination
    pub list: bool,

    #[structopt(long, default_value = "info")]
    /// Configure log level
    pub log_level: simplelog::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    // Load options
    let opts = Options::from_args();

    // Initialise logging
    let _ = simplelog::SimpleLogger::init(opts.log_level, simplelog::Config::default());

    debug!("Checking operating class table");
    if let Err(e) = opclass::table::validate() {
        return Err(anyhow::anyhow!("Invalid operating class table: {:?}", e));
    }

    if opts.list {
        for (c, class) in valid_channels() {
            println!("{:3} {:>5} MHz {:>4} MHz  class {}", c.channel, c.bandwidth, c.mhz().unwrap_or(0), class);
        }
        return Ok(());
    }

    let channel = match opts.channel {
        Some(c) => WifiChannel::new(c, opts.bandwidth),
        None => return Err(anyhow::anyhow!("No channel specified")),
    };

    match channel.operating_class() {
        Ok(class) => {
            info!("Channel {} at {} MHz: operating class {}", channel.channel, channel.bandwidth, class);
            println!("{}", class);
        },
        Err(e) => {
            return Err(anyhow::anyhow!("Channel {} at {} MHz has no operating class: {:?}", channel.channel, channel.bandwidth, e));
        }
    }

    Ok(())
}
