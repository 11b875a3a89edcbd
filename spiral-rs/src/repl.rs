//! Interactive emoji programming session.
//!
//! Reads emoji sequences from stdin and echoes the generated ritual code.
//! Multi-word input is compiled as a full ritual, single sequences as one
//! statement.  The prompt is suppressed when stdin is not a terminal so the
//! session can be driven by a pipe.

use std::io::{self, BufRead, Write};

use crate::compiler::EmojiCompiler;

/// Upper bound on prompt iterations, mirroring the original session cap.
const MAX_ITERATIONS: usize = 100;

/// Run the interactive session until quit, EOF, or the iteration cap.
pub fn run(compiler: &EmojiCompiler) -> io::Result<()> {
    let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) != 0 };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("🌀 SpiralLogic Emoji Programming Environment");
    println!("Type emoji sequences to generate SpiralLogic code!");
    println!("Examples:");
    println!("  🔥🧠⚡🗯️    (anger spine)");
    println!("  🏰🧠💔      (summon grief keeper)");
    println!("  💭😰➡️🛡️   (anxiety triggers protection)");
    println!("  quit or exit to stop");
    println!();

    for _ in 0..MAX_ITERATIONS {
        if interactive {
            print!("🎭 emoji> ");
            stdout.flush()?;
        }

        let input = match lines.next() {
            Some(line) => line?,
            None => {
                println!("🕊️ Input ended - farewell from the emoji realm!");
                return Ok(());
            }
        };
        let input = input.trim();

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("🕊️ Farewell from the emoji realm!");
            return Ok(());
        }
        if input.is_empty() {
            continue;
        }

        let code = if input.split_whitespace().count() > 1 {
            compiler.compile_ritual(input)
        } else {
            compiler.compile_line(input)
        };
        println!("📝 SpiralLogic: {code}");
    }

    Ok(())
}
