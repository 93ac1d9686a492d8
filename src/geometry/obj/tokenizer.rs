//! OBJ 行分词器
//!
//! 把文本缓冲区切分为记录：一个关键字加若干空白分隔的参数。
//! 空行、注释行被跳过；行内 `#` 之后的内容视为注释。

/// 一条 OBJ 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// 行号（从 1 开始）
    pub line: usize,

    /// 关键字，例如 `v`、`vn`、`f`
    pub keyword: &'a str,

    /// 关键字之后的参数
    pub tokens: Vec<&'a str>,
}

/// 导入流程识别的关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `v x y z [w | r g b]`
    Position,
    /// `vn x y z`
    Normal,
    /// `vt u [v] [w]`
    TexCoord,
    /// `f p[/t][/n] ...`
    Face,
}

impl Keyword {
    /// 识别关键字，不支持的指令（`o`、`g`、`usemtl`、`s` 等）返回 `None`
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "v" => Some(Keyword::Position),
            "vn" => Some(Keyword::Normal),
            "vt" => Some(Keyword::TexCoord),
            "f" => Some(Keyword::Face),
            _ => None,
        }
    }
}

/// 惰性地遍历文本中的所有记录
pub fn records(text: &str) -> impl Iterator<Item = Record<'_>> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let mut parts = content.split_whitespace();
        let keyword = parts.next()?;

        Some(Record {
            line: idx + 1,
            keyword,
            tokens: parts.collect(),
        })
    })
}
