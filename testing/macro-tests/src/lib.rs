//! Query structs shared by the end-to-end tests.
//!
//! Every type here goes through `#[derive(Filter)]`, so this crate building
//! at all is the first check on the macro.

use structq::prelude::*;
use time::PrimitiveDateTime;

///
/// UserWhere
///

#[derive(Debug, Default, Filter)]
pub struct UserWhere {
    pub name: String,
    pub age: i32,
}

///
/// UserOr
///

#[derive(Debug, Default, Filter)]
pub struct UserOr {
    pub name: String,
    pub age: i32,
}

///
/// UserOrWhere
/// One embedded OR group.
///

#[derive(Debug, Default, Filter)]
pub struct UserOrWhere {
    #[filter(embed)]
    pub or: UserOr,
}

///
/// ParentsAnd
///

#[derive(Debug, Default, Filter)]
pub struct ParentsAnd {
    pub father: String,
    pub mother: String,
}

///
/// UserOrParents
///

#[derive(Debug, Default, Filter)]
pub struct UserOrParents {
    pub name: String,
    pub age: i32,
    #[filter(nested)]
    pub parents: ParentsAnd,
}

///
/// AddrWhere
/// A top-level field next to an OR group holding an AND group.
///

#[derive(Debug, Default, Filter)]
pub struct AddrWhere {
    pub addr: String,
    #[filter(embed)]
    pub or: UserOrParents,
}

///
/// AgeWhere
///

#[derive(Debug, Default, Filter)]
pub struct AgeWhere {
    pub name: String,
    #[filter(op = ">")]
    pub age: i32,
}

///
/// NameLike
///

#[derive(Debug, Default, Filter)]
pub struct NameLike {
    #[filter(op = "like")]
    pub name: String,
}

///
/// IdsWhere
///

#[derive(Debug, Default, Filter)]
pub struct IdsWhere {
    pub id: Vec<i32>,
    #[filter(op = "not in", field = "parent_id")]
    pub not_parent: Vec<i32>,
    #[filter(op = "type_id in ?")]
    pub type_id: Vec<i32>,
}

///
/// BirthWhere
///

#[derive(Debug, Default, Filter)]
pub struct BirthWhere {
    pub birth: Vec<PrimitiveDateTime>,
}

///
/// SuppressedWhere
///

#[derive(Debug, Default, Filter)]
pub struct SuppressedWhere {
    pub name: String,
    #[filter(op = "-")]
    pub age: i32,
    pub father: Option<String>,
}

///
/// NullWhere
///

#[derive(Debug, Default, Filter)]
pub struct NullWhere {
    #[filter(op = "null")]
    pub deleted_at: bool,
    pub status: Option<i32>,
    #[filter(op = "null")]
    pub created_at: Option<bool>,
    #[filter(op = "not null")]
    pub updated_at: bool,
}

///
/// SearchOr
///

#[derive(Debug, Default, Filter)]
pub struct SearchOr {
    #[filter(op = "like", field = "name|father&mother")]
    pub name: String,
}

///
/// SearchGrouped
///

#[derive(Debug, Default, Filter)]
pub struct SearchGrouped {
    #[filter(op = "like", field = "name&(father|mother)")]
    pub name: String,
}

///
/// PageSize
///

#[derive(Debug, Default, Filter)]
pub struct PageSize {
    #[filter(op = "page")]
    pub page: i32,
    #[filter(op = "size")]
    pub size: i32,
}

///
/// NestedPageSize
///

#[derive(Debug, Default, Filter)]
pub struct NestedPageSize {
    #[filter(nested)]
    pub paging: PageSize,
}

///
/// UserOrder
///

#[derive(Debug, Default, Filter)]
pub struct UserOrder {
    #[filter(op = "asc", field = "name")]
    pub name_order: bool,
    #[filter(op = "desc")]
    pub age: bool,
    #[filter(op = "asc")]
    pub birth: Option<bool>,
    #[filter(op = "desc", field = "father,mother")]
    pub names: bool,
}

///
/// UserSearchPage
///

#[derive(Debug, Default, Filter)]
pub struct UserSearchPage {
    #[filter(op = "page")]
    pub page: i32,
    #[filter(op = "size")]
    pub size: i32,
    #[filter(op = "like", field = "name")]
    pub name: String,
}
