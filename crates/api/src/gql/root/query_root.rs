use async_graphql::MergedObject;

use crate::gql::domains::users::UserQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery);
