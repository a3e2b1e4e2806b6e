mod batch;
mod preflight;
