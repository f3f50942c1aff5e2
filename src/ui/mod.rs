// Presentation: the bilingual message catalog and the box-drawn terminal
// cards. Nothing here computes; values arrive ready-made from core.

pub mod render;
pub mod text;
