//! Builtin Category Definitions
//!
//! コード内で定義されるビルトインカテゴリ。
//! 宣言順がそのまま評価順になる（先にマッチしたカテゴリが勝つ）。

/// どのルールにもマッチしなかったファイルのカテゴリ
pub const OTHERS_CATEGORY: &str = "Others";

/// ビルトインカテゴリ定義（宣言順に評価）
pub const BUILTIN_CATEGORIES: &[CategoryRule] = &[
    CategoryRule {
        name: "System Configuration",
        patterns: &[
            "/hostname",
            "/hosts",
            "/nsswitch.conf",
            "/networks",
            "/resolv.conf",
            "/fstab",
            "/mkinitcpio.conf",
            "/systemd",
            "/rc.local",
            "/modules-load.d",
            "/modprobe.d",
            "/udev",
            "/locale.gen",
            "/vconsole.conf",
            "/locale.conf",
            "/adjtime",
            "/timezone",
            "/localtime",
            "/zoneinfo",
        ],
    },
    CategoryRule {
        name: "Security and Authentication",
        patterns: &[
            "/passwd",
            "/shadow",
            "/group",
            "/gshadow",
            "/subuid",
            "/subgid",
            "/pam.d",
            "/ssh",
            "/security",
            "/sudoers",
            "/polkit-1",
            "/gnupg",
            "/ssl",
            "/pki",
            "/selinux",
            "/ca-certificates",
            "/cifs-utils",
            "/private",
            "/authselect",
            "/keys",
        ],
    },
    CategoryRule {
        name: "Network Services Configuration",
        patterns: &[
            "/dnsmasq.conf",
            "/dhcpcd.conf",
            "/ufw",
            "/iptables",
            "/httpd",
            "/nginx",
            "/postfix",
            "/dovecot",
            "/network",
            "/apache2",
            "/iproute2",
            "/ppp",
        ],
    },
    CategoryRule {
        name: "Package Management",
        patterns: &[
            "/pacman.conf",
            "/pacman.d",
            "/apt",
            "/dpkg",
            "/yum.conf",
            "/yum.repos.d",
            "/rpm",
            "/dnf",
            "/vmware",
        ],
    },
    CategoryRule {
        name: "System Services and Daemons",
        patterns: &[
            "/rsyslog.conf",
            "/syslog.conf",
            "/logrotate.d",
            "/crontab",
            "/cron.d",
            "/systemd/timers",
            "/cups",
            "/samba",
            "/nfs.conf",
            "/exports",
            "/sane.d",
            "/services",
            "/sysctl.d",
            "/init.d",
            "alsa",
        ],
    },
    CategoryRule {
        name: "Hardware and Drivers",
        patterns: &["/cups", "/pulse", "/asound.conf", "/vulkan", "/drirc", "/udev"],
    },
    CategoryRule {
        name: "Desktop Environment and Display Managers",
        patterns: &[
            "/lightdm",
            "/gdm",
            "/xdg",
            "/fonts",
            "/fontconfig",
            "/X11",
            "/dbus-1",
        ],
    },
    CategoryRule {
        name: "Miscellaneous",
        patterns: &[
            "/profile",
            "/bash.bashrc",
            "/zsh",
            "/environment",
            "/fstab",
            "/exports",
            "/libvirt",
            "openjdk",
            "/speech-dispatcher",
        ],
    },
    CategoryRule {
        name: "Bootloaders",
        patterns: &["/grub.d", "grub"],
    },
    CategoryRule {
        name: "Cloud",
        patterns: &["/cloud", "/aws", "/azure", "/gcp"],
    },
];

/// カテゴリとその部分文字列パターンの組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// カテゴリ名（レポートのキー）
    pub name: &'static str,
    /// パス中に含まれるかを調べる部分文字列（宣言順に評価）
    pub patterns: &'static [&'static str],
}

impl CategoryRule {
    /// パスがいずれかのパターンを含むか
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| path.contains(p))
    }
}
