//! Built-in example programs.
//!
//! Two collections: hand-written ritual programs shipped as-is, and emoji
//! programs that `create` runs through the compiler before writing.  Both
//! are fixed tables; `spiral create <name>` looks names up here.

// ── Ritual examples ───────────────────────────────────────────────────────────

const HELLO: &str = r#"// Hello World in SpiralLogic
ritual.greeting {
    intent: "Demonstrate basic SpiralLogic functionality",
    participants: [user, @sage],
    consent: { required: ["basic_interaction"] }
}

execute {
    look_in {
        output.print("Welcome to SpiralLogic!")
        output.print("This is a trauma-informed programming language.")
    }

    spiral_up {
        @sage.speak {
            message: "Hello, World! I honor your presence and offer my support.",
            tone: "welcoming"
        }

        user.name = input.ask("What name would you like me to use?")
        @sage.speak {
            message: "Welcome, " + user.name + ". Your journey matters.",
            tone: "affirming"
        }
    }

    flow_out {
        output.print("Basic SpiralLogic demonstration complete.")
        output.print("You are worthy of care and support.")
    }
}

complete {
    output.print("Thank you for experiencing SpiralLogic.")
}"#;

const HEALING: &str = r#"// Therapeutic Support Session
ritual.healing_session {
    intent: "Provide gentle emotional support with full user control",
    participants: [user, @healer, @mirror],
    consent: {
        required: ["emotional_support"],
        optional: ["memory_access", "deeper_processing"]
    },
    safety: {
        anchor_mode: "ready",
        sacred_pause: "always_available"
    }
}

execute {
    look_in {
        output.print("🛡️ Creating sacred space for healing...")

        @healer.assess(user.emotional_state)

        consent.check("emotional_support")

        if user.bandwidth.current() < 0.6 {
            sacred_pause.offer {
                purpose: "Ground and center before beginning",
                duration: "user_controlled"
            }
        }
    }

    spiral_up {
        @healer.speak {
            message: "I'm here to support you. You set the pace.",
            tone: "gentle_presence"
        }

        user.feeling = input.ask("How are you feeling right now?")

        @mirror.reflect {
            content: user.feeling,
            approach: "validating_witness"
        }

        if user.wants_deeper_work {
            consent.request("deeper_processing") {
                explanation: "Explore underlying patterns with full safety"
            }

            if consent.granted("deeper_processing") {
                @healer.guide_gentle_exploration()
            }
        }
    }

    flow_out {
        @healer.speak {
            message: "You've done beautiful work. Honor your courage.",
            tone: "honoring"
        }

        output.print("💝 Integration time: What wisdom did you discover?")
        user.wisdom = input.ask("(Optional sharing)")

        if user.wisdom {
            @mirror.honor_wisdom(user.wisdom)
        }
    }
}

complete {
    @healer.closing_blessing()
    output.print("🌟 You are held in love and support.")
}"#;

const TRANSLATION: &str = r#"// Multi-Language Therapeutic Content
ritual.translation_demo {
    intent: "Demonstrate universal accessibility through translation",
    participants: [user, @translator, @healer]
}

execute {
    look_in {
        user.language = input.select("Choose your language:", ["English", "Spanish", "French", "Mandarin"])

        @translator.set_target_language(user.language)
    }

    spiral_up {
        // Core healing message in multiple languages
        if user.language == "Spanish" {
            @healer.speak {
                message: "Eres digno de amor y cuidado. Tu historia importa.",
                tone: "nurturing"
            }
        } else if user.language == "French" {
            @healer.speak {
                message: "Tu es digne d'amour et de soins. Ton histoire compte.",
                tone: "nurturing"
            }
        } else if user.language == "Mandarin" {
            @healer.speak {
                message: "你值得被爱和关怀。你的故事很重要。",
                tone: "nurturing"
            }
        } else {
            @healer.speak {
                message: "You are worthy of love and care. Your story matters.",
                tone: "nurturing"
            }
        }

        @translator.demonstrate_consent_translation(user.language)
    }

    flow_out {
        output.print("🌍 Universal healing transcends language barriers.")
    }
}"#;

const FILE_PROCESSOR: &str = r#"// File Processing with Trauma-Informed Safety
ritual.process_files {
    intent: "Process files while maintaining emotional safety",
    participants: [user, @organizer, @protector],
    consent: { required: ["file_access"] }
}

execute {
    look_in {
        file.input_folder = input.ask("Enter folder path to process:")

        if not file.exists(file.input_folder) {
            output.error("Folder not found: " + file.input_folder)
            ritual.abort()
        }

        file.file_list = file.list_files(file.input_folder, "*.txt")
        output.print("Found " + file.file_list.count() + " files to process")
    }

    spiral_up {
        for each file.current in file.file_list {
            output.print("Processing: " + file.current.name)

            // Check user bandwidth before each file
            if user.bandwidth.current() < 0.4 {
                sacred_pause.offer {
                    purpose: "Rest before continuing file processing"
                }
            }

            file.content = file.read(file.current)
            file.processed = @organizer.clean_content(file.content)

            file.output_path = file.input_folder + "/processed/" + file.current.name
            file.write(file.output_path, file.processed)

            output.print("✅ Processed: " + file.current.name)
        }
    }

    flow_out {
        output.print("🎉 All files processed successfully!")
        output.print("Output location: " + file.input_folder + "/processed/")
    }
}"#;

/// Hand-written ritual programs, written out verbatim by `create`.
pub const RITUAL_EXAMPLES: &[(&str, &str)] = &[
    ("hello", HELLO),
    ("healing", HEALING),
    ("translation", TRANSLATION),
    ("file_processor", FILE_PROCESSOR),
];

// ── Emoji programs ────────────────────────────────────────────────────────────

/// Emoji source programs; `create` compiles these to ritual text first.
pub const EMOJI_PROGRAMS: &[(&str, &str)] = &[
    ("anger_processing", "🔥🧠⚡🗯️\n🏰🧠💔\n💭😡➡️🛡️\n⏸️🧘\n🌀🕊️"),
    ("grief_support", "💧🫀🐢✨\n🏰🧠💔\n💭😢➡️🧘\n🌀👁️🌊🕊️"),
    ("anxiety_management", "🕷️🧠⚡🆘\n🏰🧠😰\n💭😰➡️🛡️\n⏸️🛑\n📋✅"),
    ("joy_expression", "🌞🫀🐎✨\n🏰🧠😊\n🎭🌊\n🌀🕊️"),
    ("complex_spine", "🔥💧🧠🫀⚡🐢🗯️🆘\n🏰🧠💜\n💭🤯➡️⏸️\n🌀👁️🌊🕊️\n📋✅"),
];

/// Look up a ritual example by name.
pub fn ritual_example(name: &str) -> Option<&'static str> {
    RITUAL_EXAMPLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, src)| *src)
}

/// Look up an emoji program by name.
pub fn emoji_program(name: &str) -> Option<&'static str> {
    EMOJI_PROGRAMS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, src)| *src)
}

/// Every name `create` accepts, ritual examples first.
pub fn available_names() -> Vec<&'static str> {
    RITUAL_EXAMPLES
        .iter()
        .chain(EMOJI_PROGRAMS)
        .map(|(n, _)| *n)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
