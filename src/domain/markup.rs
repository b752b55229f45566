/// A minimal HTML fragment tree. Populators build fragments as values so
/// tests can assert on structure; serialization and escaping happen in one
/// place at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(nodes.into_iter().map(Node::Element));
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    pub fn render(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.render(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

const VOID_TAGS: [&str; 4] = ["meta", "link", "br", "hr"];

impl Node {
    pub fn render(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_text(content)),
            Node::Element(element) => element.render(out),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let list = el("ul")
            .class("features")
            .child(el("li").text("One"))
            .child(el("li").text("Two"));
        assert_eq!(
            list.to_html(),
            "<ul class=\"features\"><li>One</li><li>Two</li></ul>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node = el("p").text("a < b & c > d");
        assert_eq!(node.to_html(), "<p>a &lt; b &amp; c &gt; d</p>");
    }

    #[test]
    fn test_attr_quotes_escaped() {
        let node = el("a").attr("title", "say \"hi\"");
        assert_eq!(node.to_html(), "<a title=\"say &quot;hi&quot;\"></a>");
    }
}
