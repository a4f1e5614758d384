use crate::closure::TypeClosure;
use crate::errors::BridgeResult;
use crate::package::Package;
use serde::Serialize;

/// Everything a target renderer needs: the package and its wrapper closure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeModel<'a> {
    pub package: &'a Package,

    #[serde(flatten)]
    pub closure: TypeClosure<'a>,
}

impl<'a> BridgeModel<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self {
            package,
            closure: TypeClosure::collect(package),
        }
    }

    pub fn to_json_pretty(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
