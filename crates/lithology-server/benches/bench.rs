use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lithology_core::proto::{LithologyRequest, lithology_service_server::LithologyService};
use lithology_server::server::{delegate::LexiconParser, service::handler::LithologyHandler};
use tokio::runtime::Builder;
use tonic::Request;

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("short", "moist grey clay, stiff"),
    (
        "long",
        "wet brown sandy gravel with some cobbles and occasional boulders, trace silt, very dense",
    ),
    ("unparseable", "brown, wet, loose"),
    ("empty", ""),
];

fn handler_bench(c: &mut Criterion) {
    let rt = Builder::new_multi_thread().enable_all().build().unwrap();
    let handler = LithologyHandler::new(LexiconParser);

    let mut group = c.benchmark_group("handler/parse_lithology");
    group.throughput(Throughput::Elements(1));

    for (label, description) in DESCRIPTIONS {
        group.bench_function(*label, |b| {
            b.to_async(&rt).iter(|| {
                let handler = handler.clone();
                async move {
                    let req = Request::new(LithologyRequest {
                        description: description.to_string(),
                    });
                    let _ = black_box(handler.parse_lithology(req).await);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, handler_bench);
criterion_main!(benches);
