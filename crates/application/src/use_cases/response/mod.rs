mod annotate_response;

pub use annotate_response::AnnotateResponseUseCase;
