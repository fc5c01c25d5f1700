use criterion::{criterion_group, criterion_main, Criterion};
use pdrt::{Pdrs, PdrsIter};

fn parse(s: &str) -> Vec<Pdrs> {
    PdrsIter::new(s).collect::<Result<_, _>>().unwrap()
}

/// Merge `n` sentences that all reuse the same label and referent.
fn sentences(n: usize) -> Pdrs {
    let s = Pdrs::parse_str("<1,{(1,x)},{(1,man(x)),(1,NOT <2,{(2,y)},{(2,see(x,y))},{}>)},{}>");
    let s = s.unwrap();
    (1..n).fold(s.clone(), |acc, _| Pdrs::amerge(acc, s.clone()))
}

/// Nest `n` negations, each declaring the same referent.
fn negations(n: usize) -> Pdrs {
    (1..=n).fold(Pdrs::Lambda("P".into()), |acc, i| {
        let s = format!("<{i},{{(1,x)}},{{(1,f(x)),(1,NOT {acc})}},{{}}>");
        Pdrs::parse_str(&s).unwrap()
    })
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let demos = include_str!("../../demos/discourse.pdrs");
    let ps = parse(demos);
    let sents = sentences(30);
    let negs = negations(30);

    c.bench_function("parse", |b| b.iter(|| parse(demos)));
    c.bench_function("demos", |b| {
        b.iter(|| ps.iter().map(|p| p.resolve_merges()).count())
    });
    c.bench_function("sentences", |b| b.iter(|| sents.purify()));
    c.bench_function("negations", |b| b.iter(|| negs.purify()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
