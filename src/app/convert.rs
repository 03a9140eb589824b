use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::convert::{decode_elements, DecodeStatus, DecoderConfig, Element};
use crate::listener::ActionWriter;
use crate::util::misc::*;

#[derive(Debug, Clone, clap::Args)]
pub struct ConvertArgs {
    /// 要素列(JSON)のファイル. ディレクトリの場合は中のjsonファイルをすべて変換
    #[arg(short = 'f', long = "file")]
    pub file_path: PathBuf,

    /// 出力先ファイル (省略時は標準出力)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TAIKYOKUにlog属性が無い場合の牌譜ID (省略時はファイル名)
    #[arg(long)]
    pub log_name: Option<String>,
}

#[derive(Debug)]
pub struct ConvertApp {
    args: ConvertArgs,
}

impl ConvertApp {
    pub fn new(args: ConvertArgs) -> Self {
        Self { args }
    }

    // 変換した行動の数を返却
    pub fn run(&self) -> Res<usize> {
        // パスがディレクトリならそのディレクトリ内のすべてのjsonファイルを読み込む
        let path = &self.args.file_path;
        let paths = if path.is_dir() {
            get_paths(path, "json")?
        } else {
            vec![path.clone()]
        };

        let mut out: Box<dyn Write> = match &self.args.output {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        let mut total = 0;
        for p in &paths {
            total += self
                .convert_file(p, &mut out)
                .map_err(|e| format!("{}: {}", p.display(), e))?;
        }
        out.flush()?;
        info!(files = paths.len(), actions = total, "converted");
        Ok(total)
    }

    fn convert_file(&self, path: &Path, out: &mut dyn Write) -> Res<usize> {
        let contents = std::fs::read_to_string(path)?;
        let elems: Vec<Element> = serde_json::from_str(&contents)?;
        let config = DecoderConfig {
            log_name: self
                .args
                .log_name
                .clone()
                .unwrap_or_else(|| file_stem(path)),
        };

        let mut writer = ActionWriter::new(out);
        let status = decode_elements(&elems, config, &mut writer)?;
        let count = writer.count();
        writer.finish()?;
        if status == DecodeStatus::Broken {
            warn!(path = %path.display(), "conversion stopped: broken log");
        }
        Ok(count)
    }
}
