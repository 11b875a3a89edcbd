use std::path::{Path, PathBuf};

use spiral::cli::{self, Command};
use spiral::compiler::EmojiCompiler;
use spiral::script::{interp, Interpreter};
use spiral::{repl, templates};

fn main() {
    let command = match cli::parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("spiral: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    let status = match command {
        Command::Run { file } => cmd_run(&file),
        Command::Compile { file, output } => cmd_compile(&file, output),
        Command::Create { name, output_dir } => cmd_create(&name, &output_dir),
        Command::Repl => cmd_repl(),
        Command::Demo => cmd_demo(),
        Command::Version => {
            println!("SpiralLogic {} (Rust rewrite)", env!("CARGO_PKG_VERSION"));
            0
        }
        Command::Help => {
            println!("{}", cli::USAGE);
            0
        }
    };
    std::process::exit(status);
}

// ── run ───────────────────────────────────────────────────────────────────────

fn cmd_run(file: &Path) -> i32 {
    if !file.exists() {
        println!("File not found: {}", file.display());
        return 1;
    }
    if file.extension().map_or(true, |ext| ext != "spiral") {
        println!("Warning: File doesn't have .spiral extension");
    }

    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            println!("Error reading file: {e}");
            return 1;
        }
    };

    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    println!("Running SpiralLogic program: {name}");

    let mut interpreter = Interpreter::new();
    interpreter.live = true;
    interpreter.prompt = Some(interp::stdin_prompt());
    let outcome = interpreter.run(&source);

    if outcome.success {
        println!("Program executed successfully");
        0
    } else {
        println!(
            "Program execution failed: {}",
            outcome.error.as_deref().unwrap_or("Unknown error")
        );
        1
    }
}

// ── compile ───────────────────────────────────────────────────────────────────

fn cmd_compile(file: &Path, output: Option<PathBuf>) -> i32 {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            println!("Error reading file: {e}");
            return 1;
        }
    };

    let ritual = EmojiCompiler::new().compile_ritual(&source);
    let out_path = output.unwrap_or_else(|| file.with_extension("spiral"));

    if let Err(e) = std::fs::write(&out_path, ritual) {
        println!("Error writing {}: {e}", out_path.display());
        return 1;
    }
    println!("Compiled {} -> {}", file.display(), out_path.display());
    0
}

// ── create ────────────────────────────────────────────────────────────────────

fn cmd_create(name: &str, output_dir: &Path) -> i32 {
    let (path, content) = if let Some(source) = templates::ritual_example(name) {
        (output_dir.join(format!("{name}.spiral")), source.to_owned())
    } else if let Some(emoji) = templates::emoji_program(name) {
        let ritual = EmojiCompiler::new().compile_ritual(emoji);
        let content = format!(
            "// Generated from emoji program\n// Original: {}\n\n{ritual}",
            emoji.replace('\n', " "),
        );
        (output_dir.join(format!("emoji_{name}.spiral")), content)
    } else {
        println!("Unknown example: {name}");
        println!("Available examples: {}", templates::available_names().join(", "));
        return 1;
    };

    if let Err(e) = std::fs::write(&path, content) {
        println!("Error creating example: {e}");
        return 1;
    }
    println!("Created example: {}", path.display());
    0
}

// ── repl / demo ───────────────────────────────────────────────────────────────

fn cmd_repl() -> i32 {
    match repl::run(&EmojiCompiler::new()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("spiral: {e}");
            1
        }
    }
}

fn cmd_demo() -> i32 {
    println!("🌀 SpiralLogic Emoji Bridge Demo");
    let compiler = EmojiCompiler::new();
    for emoji in ["🔥🧠⚡🗯️", "🏰🧠💔", "💭😰➡️🛡️", "⏸️🧘"] {
        println!("{emoji} -> {}", compiler.compile_line(emoji));
    }
    0
}
