use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mspy_core::keys::key_sequence;
use mspy_core::memory::MemoryTree;
use mspy_core::parser::{parse_args, Configuration};
use mspy_core::taskbar::read_current_mode;
use mspy_core::types::ControlType;

fn wide_taskbar(buttons: usize) -> MemoryTree {
    let mut tree = MemoryTree::new();
    let root = tree.root_id();
    let bar = tree.add(root, "任务栏", ControlType::Pane);
    let apps = tree.add(bar, "正在运行的应用程序", ControlType::ToolBar);
    for i in 0..buttons {
        tree.add(apps, &format!("应用 {}", i), ControlType::Button);
    }
    let tray = tree.add(bar, "系统托盘", ControlType::ToolBar);
    tree.add(tray, "托盘输入指示器 中", ControlType::Button);
    tree
}

fn default_config() -> Configuration {
    parse_args(Vec::<String>::new())
        .into_config()
        .expect("default config")
}

fn bench_read_mode(c: &mut Criterion) {
    let config = default_config();
    let tree = wide_taskbar(64);
    c.bench_function("taskbar/read_mode_last_of_64", |b| {
        b.iter(|| black_box(read_current_mode(&config, &tree).expect("mode")));
    });
}

fn bench_parse_args(c: &mut Criterion) {
    c.bench_function("parser/full_argument_set", |b| {
        b.iter(|| {
            black_box(
                parse_args(["1", "-k=ctrl+space", "-t=Taskbar", r"-i=ime\s+(\w+)", "-l=zh,en"])
                    .into_config()
                    .expect("config"),
            )
        });
    });
}

fn bench_key_sequence(c: &mut Criterion) {
    c.bench_function("keys/five_key_chord", |b| {
        b.iter(|| black_box(key_sequence(black_box("shift+ctrl+alt+win+space"))));
    });
}

criterion_group!(benches, bench_read_mode, bench_parse_args, bench_key_sequence);
criterion_main!(benches);
