use std::path::PathBuf;

use clap::{ArgAction, Parser};
use collect_files_domain::ConfigPatch;

use super::value_enum::{CliDecodePolicy, CliNewlineMode};
use crate::VERSION;

#[derive(Parser, Debug)]
#[command(name = "collect_files", version = VERSION, about = "ディレクトリ配下のファイル内容を JSON に収集するツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するディレクトリ (省略時はカレントディレクトリ)
    pub root: Option<PathBuf>,

    /// 出力ファイル (既定: collected_files.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// 追加で除外するディレクトリ名またはグロブ (複数指定可)
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAME")]
    pub exclude_dir: Vec<String>,

    /// 既定の除外ディレクトリ (target) を無効化
    #[arg(long)]
    pub no_default_excludes: bool,

    /// UTF-8 として読めないバイトの扱い
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_decode_error: Option<CliDecodePolicy>,

    /// 改行コードの扱い (translate: CRLF / CR を LF に変換, keep: そのまま)
    #[arg(long, value_enum, value_name = "MODE")]
    pub newlines: Option<CliNewlineMode>,

    /// シンボリックリンク先のディレクトリも辿る
    #[arg(long)]
    pub follow_links: bool,

    /// 各ディレクトリ内をファイル名順に走査
    #[arg(long)]
    pub sort: bool,

    /// レコードを収集しながら逐次書き出す
    #[arg(long)]
    pub stream: bool,

    /// 出力先に既にあるファイルを収集対象から外す
    #[arg(long)]
    pub exclude_output: bool,

    /// 非 ASCII 文字を \uXXXX でエスケープして出力
    #[arg(long)]
    pub ascii: bool,

    /// 設定ファイル (YAML / JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 読み込み失敗・保存失敗時に終了コード 1 を返す
    #[arg(long)]
    pub strict: bool,

    /// ログを詳細化 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The command-line layer of the configuration. Flags that were not given leave
    /// the lower layers untouched.
    pub fn to_patch(&self) -> ConfigPatch {
        ConfigPatch {
            root: self.root.clone(),
            output: self.output.clone(),
            excluded_dirs: None,
            extra_excluded_dirs: self.exclude_dir.clone(),
            no_default_excludes: self.no_default_excludes,
            on_decode_error: self.on_decode_error.map(Into::into),
            newlines: self.newlines.map(Into::into),
            follow_links: self.follow_links.then_some(true),
            sort: self.sort.then_some(true),
            stream: self.stream.then_some(true),
            exclude_output: self.exclude_output.then_some(true),
            ascii: self.ascii.then_some(true),
        }
    }
}
