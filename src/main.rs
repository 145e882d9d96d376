use clap::Parser;

use stegotext::{
    cli::Cli,
    handler::{handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的模式（编码或解码）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据模式调用相应的处理函数
    if let Some(text) = cli.encode {
        handle_encode(&cli.image, &text)?;
    } else {
        let text = handle_decode(&cli.image)?;
        println!("{text}");
    }

    Ok(())
}
