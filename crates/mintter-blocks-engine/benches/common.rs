// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
use mintter_blocks_engine::model::{Embed, FlowBlock, Inline, Link, Mark, Text};

#[allow(dead_code)]
pub fn generate_block(sentences: usize) -> FlowBlock {
    let mut children: Vec<Inline> = Vec::new();

    for i in 0..sentences {
        children.push(Text::new(format!("Sentence {i} has some plain text, ")).into());
        children.push(Text::new("a bold part").with_mark(Mark::Strong).into());
        children.push(Text::new(" and ").into());
        children.push(
            Link::new(
                format!("https://mintter.com/{}", i % 7),
                vec![
                    Text::new("a link"),
                    Text::new(" with emphasis 😀").with_mark(Mark::Emphasis),
                ],
            )
            .into(),
        );
        if i % 5 == 0 {
            children.push(Embed::new(format!("mtt://doc{}/block{}", i % 3, i)).into());
        }
        children.push(Text::new(". ").into());
    }

    FlowBlock::statement("bench", children)
}
