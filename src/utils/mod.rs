pub mod cc;
