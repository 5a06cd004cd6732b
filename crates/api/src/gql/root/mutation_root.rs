use async_graphql::MergedObject;

use crate::gql::domains::profiles::ProfileMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ProfileMutation, UserMutation);
