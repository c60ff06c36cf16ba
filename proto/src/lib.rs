//! Generated protobuf and gRPC types for the racing and sports services.

pub mod racing {
    tonic::include_proto!("racing");
}

pub mod sports {
    tonic::include_proto!("sports");
}
