pub mod chroma_filter;
