use bytespan_compiler::{CompileResult, Compiler, dump, dump_dot};
use bytespan_core::{Colors, Encoding};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
}

pub struct DumpArgs {
    pub low: u64,
    pub high: u64,
    pub encoding: Encoding,
    pub memoize: bool,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match render(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render(args: &DumpArgs) -> CompileResult<String> {
    let automaton = Compiler::builder()
        .encoding(args.encoding)
        .memoize(args.memoize)
        .build()
        .compile(args.low, args.high)?;

    Ok(match args.format {
        DumpFormat::Text => dump(&automaton, Colors::new(args.color)),
        DumpFormat::Dot => dump_dot(&automaton),
    })
}
