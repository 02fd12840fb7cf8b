use std::net::IpAddr;

use ipnet::IpNet;

/// Output layout, fixed at startup from the cli flags.
#[derive(Clone, Copy)]
pub struct OutputFormat {
	/// leading source label field
	pub file: bool,
	/// matched needle field
	pub pattern: bool,
	/// print the matched address instead of the whole line
	pub only_ip: bool,
}

impl OutputFormat {
	// fields joined with `;`, unescaped; consumers rely on this exact shape
	pub fn render(&self, source: &str, net: &IpNet, addr: IpAddr, line: &str) -> String {
		let mut out = String::new();
		if self.file {
			out.push_str(source);
			out.push(';');
		}
		if self.pattern {
			out.push_str(&net.to_string());
			out.push(';');
		}
		if self.only_ip {
			out.push_str(&addr.to_string());
		} else {
			out.push_str(line.trim_end());
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layouts() {
		let net: IpNet = "10.0.0.0/24".parse().unwrap();
		let addr: IpAddr = "10.0.0.9".parse().unwrap();
		let line = "seen 10.0.0.9 today\n";

		let render = |file, pattern, only_ip| {
			OutputFormat { file, pattern, only_ip }.render("log.txt", &net, addr, line)
		};
		assert_eq!(render(true, false, false), "log.txt;seen 10.0.0.9 today");
		assert_eq!(render(true, true, false), "log.txt;10.0.0.0/24;seen 10.0.0.9 today");
		assert_eq!(render(true, true, true), "log.txt;10.0.0.0/24;10.0.0.9");
		assert_eq!(render(false, true, true), "10.0.0.0/24;10.0.0.9");
		assert_eq!(render(false, false, false), "seen 10.0.0.9 today");
	}

	#[test]
	fn interior_whitespace_untouched() {
		let net: IpNet = "10.0.0.0/24".parse().unwrap();
		let addr: IpAddr = "10.0.0.9".parse().unwrap();
		let f = OutputFormat { file: false, pattern: false, only_ip: false };
		assert_eq!(f.render("x", &net, addr, "  a   10.0.0.9  \n"), "  a   10.0.0.9");
	}
}
