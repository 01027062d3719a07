//! The md-render command-line executable.

fn main() -> anyhow::Result<()> {
    md_render::run()
}
