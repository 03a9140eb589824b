#![warn(rust_2018_idioms)]

use clap::{Parser, Subcommand};
use tracing::{error, Level};

use mjlog::app::{ConvertApp, ConvertArgs, MeldApp, MeldArgs};

#[derive(Parser, Debug)]
#[command(name = "mjlog")]
#[command(about = "天鳳牌譜(mjlog)の要素列をmjai形式の行動列に変換")]
struct Cli {
    /// ログレベル (error, warn, info, debug, trace). ログは標準エラーに出力
    #[arg(long, default_value = "warn", global = true)]
    log_level: Level,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// 牌譜変換モード
    Convert(ConvertArgs),
    /// 副露コード解析モード
    Meld(MeldArgs),
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let res = match cli.mode {
        Mode::Convert(args) => ConvertApp::new(args).run().map(|_| ()),
        Mode::Meld(args) => MeldApp::new(args).run(),
    };
    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
