// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use tabjoin::scrape;

fn build_sample(tables: usize, rows: usize) -> String {
    let mut html = String::from("<html><body>");
    for t in 0..tables {
        html.push_str(&format!("<h2>Section {t}</h2><table>"));
        for r in 0..rows {
            html.push_str(&format!(
                "<tr><td>cell {t}.{r}.0</td><td>cell {t}.{r}.1</td><td>cell {t}.{r}.2</td></tr>"
            ));
        }
        html.push_str("</table>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let small = build_sample(5, 20);
    let large = build_sample(50, 100);

    c.bench_function("extract_small_page", |b| {
        b.iter(|| {
            let page = scrape::extract(black_box(&small));
            black_box(page.rows.len())
        })
    });

    c.bench_function("extract_large_page", |b| {
        b.iter(|| {
            let page = scrape::extract(black_box(&large));
            black_box(page.rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
