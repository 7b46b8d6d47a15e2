pub(crate) use crate::{error::*, lang::*, source::*, json_list::*};
pub(crate) use log::{debug, trace, warn};
pub(crate) use serde::Deserialize;
pub(crate) use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};
