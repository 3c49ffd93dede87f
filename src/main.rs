mod cli;
mod workflow;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    // 個々のファイルの失敗は run の中で報告済み。ここに来るのはディレクトリを読めなかった場合のみ。
    match workflow::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
