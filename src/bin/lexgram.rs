//! lexgram CLI - 命令行入口
//!
//! 纯前端，无业务逻辑。只负责参数解析和调用 API。

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

use lexgram::{
    api::{self, LexgramError},
    core::{config, logger},
    grammar,
    lexer::{sets, CheckerSet, Token},
    platform::{format_tokens, print_error_with_source},
    Config, LogConfig, LogFormat,
};

#[derive(Parser)]
#[command(
    name = "lexgram",
    about = "Maximal-munch tokenizer and grammar-definition parser",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 日志级别 (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Lexer 日志级别
    #[arg(long, value_enum, global = true)]
    log_lexer: Option<LogLevelArg>,

    /// Parser 日志级别
    #[arg(long, value_enum, global = true)]
    log_parser: Option<LogLevelArg>,

    /// 日志输出格式
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    format: LogFormatArg,

    /// 日志输出到文件
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// 扫描文件并打印 token
    Tokenize {
        /// 源文件路径
        file: PathBuf,

        /// 预定义的词法
        #[arg(long, value_enum, default_value = "json", conflicts_with = "checkers")]
        set: SetArg,

        /// 从 JSON 文件加载检查器集合
        #[arg(long, value_name = "SPEC")]
        checkers: Option<PathBuf>,

        /// 同时输出被忽略的 token（如空白）
        #[arg(long)]
        keep_ignored: bool,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 解析文法定义文件
    Parse {
        /// 文法定义文件路径
        file: PathBuf,

        /// 以 JSON 输出 AST
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SetArg {
    Json,
    Grammar,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // 初始化配置和日志
    let fresh_config = config::init(build_config(&cli)).is_ok();
    let format = match cli.format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    if let Err(e) = logger::init_with_file(format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot initialize logging: {}", e);
        process::exit(1);
    }
    if !fresh_config {
        tracing::trace!(target: "lexgram::cli", "Configuration already initialized, keeping the existing one");
    }

    let code = match &cli.command {
        Command::Tokenize {
            file,
            set,
            checkers,
            keep_ignored,
            json,
        } => handle_tokenize(file, *set, checkers.as_deref(), *keep_ignored, *json),
        Command::Parse { file, json } => handle_parse(file, *json),
    };
    process::exit(code);
}

fn read_source(file: &Path) -> Result<String, i32> {
    std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: Cannot read file '{}': {}", file.display(), e);
        1
    })
}

fn load_checker_set(set: SetArg, checkers: Option<&Path>) -> Result<CheckerSet, LexgramError> {
    match checkers {
        Some(path) => api::checker_set_from_json(&std::fs::read_to_string(path)?),
        None => Ok(match set {
            SetArg::Json => sets::json(),
            SetArg::Grammar => grammar::checker_set(),
        }),
    }
}

fn handle_tokenize(
    file: &Path,
    set: SetArg,
    checkers: Option<&Path>,
    keep_ignored: bool,
    json: bool,
) -> i32 {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    tracing::info!(target: "lexgram::cli", "Tokenizing {}", file.display());

    let result = load_checker_set(set, checkers).and_then(|mut set| {
        if keep_ignored {
            set = without_ignored(set);
        }
        api::tokenize(&source, set)
    });

    match result {
        Ok(tokens) => {
            print_tokens(&tokens, json);
            0
        }
        Err(e) => report(&e, &source, json),
    }
}

fn handle_parse(file: &Path, json: bool) -> i32 {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    tracing::info!(target: "lexgram::cli", "Parsing {}", file.display());

    match api::parse_grammar(&source) {
        Ok(grammar) if json => match serde_json::to_string_pretty(&grammar) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: Cannot serialize grammar: {}", e);
                1
            }
        },
        Ok(grammar) => {
            println!("{}", grammar);
            0
        }
        Err(e) => report(&e, &source, json),
    }
}

/// 去掉忽略列表，保留原有检查器顺序
fn without_ignored(set: CheckerSet) -> CheckerSet {
    set.iter()
        .fold(CheckerSet::new(), |acc, (name, checker)| {
            acc.with(name, checker.clone())
        })
}

fn print_tokens(tokens: &[Token], json: bool) {
    if json {
        match serde_json::to_string_pretty(tokens) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: Cannot serialize tokens: {}", e),
        }
    } else {
        print!("{}", format_tokens(tokens));
    }
}

fn report(e: &LexgramError, source: &str, json: bool) -> i32 {
    if json {
        eprintln!("{}", e.to_report().to_json());
    } else {
        print_error_with_source(e, source);
    }
    1
}

fn build_config(cli: &Cli) -> Config {
    // 根据 -v 次数确定全局级别
    let global = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    Config {
        log: LogConfig {
            global,
            lexer: cli.log_lexer.map(to_tracing_level),
            parser: cli.log_parser.map(to_tracing_level),
        },
    }
}

fn to_tracing_level(level: LogLevelArg) -> Level {
    match level {
        LogLevelArg::Error => Level::ERROR,
        LogLevelArg::Warn => Level::WARN,
        LogLevelArg::Info => Level::INFO,
        LogLevelArg::Debug => Level::DEBUG,
        LogLevelArg::Trace => Level::TRACE,
    }
}
