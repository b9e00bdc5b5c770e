//! Typed ID definitions for the provider's resources.
//!
//! Every kind lives under a resource group and a provider namespace; the
//! trailing `{type}/{name}` pairs identify the resource itself.

use crate::macros::define_resource_id;

// =============================================================================
// Power BI Embedded
// =============================================================================

define_resource_id!(
    /// A Power BI Embedded dedicated capacity.
    CapacityId, "capacity", "Capacity", "Microsoft.PowerBIDedicated",
    ["capacities" => capacity_name: "Capacity Name"]
);

// =============================================================================
// App Service
// =============================================================================

define_resource_id!(
    /// An App Service Environment (v2 or v3).
    AppServiceEnvironmentId, "app-service-environment", "App Service Environment", "Microsoft.Web",
    ["hostingEnvironments" => hosting_environment_name: "Hosting Environment Name"]
);

// =============================================================================
// Network
// =============================================================================

define_resource_id!(
    /// A network watcher, the regional parent of flow logs.
    NetworkWatcherId, "network-watcher", "Network Watcher", "Microsoft.Network",
    ["networkWatchers" => network_watcher_name: "Network Watcher Name"]
);

define_resource_id!(
    /// A flow log attached to a network watcher.
    FlowLogId, "flow-log", "Flow Log", "Microsoft.Network",
    [
        "networkWatchers" => network_watcher_name: "Network Watcher Name",
        "flowLogs" => flow_log_name: "Flow Log Name",
    ]
);

impl FlowLogId {
    /// Returns the ID of the network watcher that owns this flow log.
    #[must_use]
    pub fn network_watcher_id(&self) -> NetworkWatcherId {
        NetworkWatcherId::new(
            self.subscription_id.as_str(),
            self.resource_group.as_str(),
            self.network_watcher_name.as_str(),
        )
    }
}

// =============================================================================
// Azure VMware Solution
// =============================================================================

define_resource_id!(
    /// An Azure VMware Solution private cloud.
    PrivateCloudId, "private-cloud", "Private Cloud", "Microsoft.AVS",
    ["privateClouds" => private_cloud_name: "Private Cloud Name"]
);

define_resource_id!(
    /// A vSphere cluster inside a private cloud.
    PrivateCloudClusterId, "private-cloud-cluster", "Private Cloud Cluster", "Microsoft.AVS",
    [
        "privateClouds" => private_cloud_name: "Private Cloud Name",
        "clusters" => cluster_name: "Cluster Name",
    ]
);

define_resource_id!(
    /// An ExpressRoute circuit authorization key for a private cloud.
    ExpressRouteAuthorizationId, "express-route-authorization", "Express Route Authorization", "Microsoft.AVS",
    [
        "privateClouds" => private_cloud_name: "Private Cloud Name",
        "authorizations" => authorization_name: "Authorization Name",
    ]
);

impl PrivateCloudClusterId {
    /// Returns the ID of the private cloud that owns this cluster.
    #[must_use]
    pub fn private_cloud_id(&self) -> PrivateCloudId {
        PrivateCloudId::new(
            self.subscription_id.as_str(),
            self.resource_group.as_str(),
            self.private_cloud_name.as_str(),
        )
    }
}

impl ExpressRouteAuthorizationId {
    /// Returns the ID of the private cloud that owns this authorization.
    #[must_use]
    pub fn private_cloud_id(&self) -> PrivateCloudId {
        PrivateCloudId::new(
            self.subscription_id.as_str(),
            self.resource_group.as_str(),
            self.private_cloud_name.as_str(),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
