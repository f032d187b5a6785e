//! Benchmarks for the editor engine's per-keystroke work
//!
//! Run with: cargo bench --bench editing

use codedaily::editable::{ChangeOrigin, EditableState, EditorKey, Selection};
use codedaily::editor::CodeEditor;
use codedaily::syntax::Language;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn buffer(lines: usize) -> String {
    "        int value = compute(a, b);\n".repeat(lines)
}

// ============================================================================
// Keystrokes
// ============================================================================

#[divan::bench(args = [10, 1_000, 10_000])]
fn enter_at_end(bencher: divan::Bencher, lines: usize) {
    let text = format!("{}    if (x) {{", buffer(lines));
    let caret = text.chars().count();
    bencher.bench_local(|| {
        let mut state = EditableState::new(&text);
        divan::black_box(state.handle_key(&text, Selection::caret(caret), EditorKey::Enter))
    });
}

#[divan::bench(args = [10, 1_000, 10_000])]
fn close_brace_dedent(bencher: divan::Bencher, lines: usize) {
    let text = format!("{}        ", buffer(lines));
    let caret = text.chars().count();
    bencher.bench_local(|| {
        let mut state = EditableState::new(&text);
        divan::black_box(state.handle_key(&text, Selection::caret(caret), EditorKey::Char('}')))
    });
}

// ============================================================================
// History
// ============================================================================

#[divan::bench(args = [10, 1_000])]
fn fill_history(lines: usize) -> usize {
    let base = buffer(lines);
    let mut state = EditableState::new(&base);
    for i in 0..100 {
        state.record_user_edit(format!("{}{}", base, i), i);
    }
    state.history().len()
}

#[divan::bench(args = [10, 1_000])]
fn undo_redo_walk(bencher: divan::Bencher, lines: usize) {
    let base = buffer(lines);
    let mut state = EditableState::new(&base);
    for i in 0..50 {
        state.record_user_edit(format!("{}{}", base, i), i);
    }
    bencher.bench_local(|| {
        while state.can_undo() {
            divan::black_box(state.undo());
        }
        while state.can_redo() {
            divan::black_box(state.redo());
        }
    });
}

// ============================================================================
// Render path without highlighting
// ============================================================================

#[divan::bench(args = [10, 1_000])]
fn render_after_edit(bencher: divan::Bencher, lines: usize) {
    let text = buffer(lines);
    let mut editor = CodeEditor::new(&text);
    let mut n = 0usize;
    bencher.bench_local(|| {
        n += 1;
        let value = format!("{}{}", text, n);
        divan::black_box(editor.render(&value, Language::C, ChangeOrigin::UserEdit, None))
    });
}
