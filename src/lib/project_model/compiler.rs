use crate::domain::commands::arguments::Argument;

#[derive(Debug, PartialEq, Eq)]
pub struct CompilerModel {
    pub driver: String,
    pub formatter: String,
    pub extra_args: Vec<Argument>,
}
