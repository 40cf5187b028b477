use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monkeyc_lex::Lexer;
use monkeyc_par::Parser;
use monkeyc_util::Handler;

fn bench_parser(c: &mut Criterion) {
    let unit = "let add = fn(x, y) { x + y };
const total = add(1, 2) * 3 % 4 - add(5.5, .25);
if (total <= 2 == true) { total } else { !total };
";
    let source = unit.repeat(100);

    c.bench_function("parse_program", |b| {
        b.iter(|| {
            let mut handler = Handler::new();
            let mut parser = Parser::new(Lexer::new(black_box(&source)), &mut handler);
            let program = parser.parse_program();
            assert!(!handler.has_errors());
            program.statements.len()
        })
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
