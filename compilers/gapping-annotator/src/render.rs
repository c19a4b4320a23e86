use gapping_graph::SentenceGraph;

/// Surface words joined by single spaces.
pub fn render_original(graph: &SentenceGraph) -> String {
    graph
        .tokens()
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`render_original`], with every annotated token replaced by `[fill]`.
pub fn render_filled(graph: &SentenceGraph) -> String {
    graph
        .tokens()
        .iter()
        .map(|t| match graph.annotation(t.index) {
            Some(fill) => format!("[{fill}]"),
            None => t.word.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
